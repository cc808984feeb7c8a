use crate::error::{ErrorContext, MongoDistError};

pub fn format_error_chain(error: &MongoDistError) -> String {
    let context = ErrorContext::new(error);
    context.to_string()
}
