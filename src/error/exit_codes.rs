use crate::error::MongoDistError;

pub fn get_exit_code(error: &MongoDistError) -> i32 {
    match error {
        MongoDistError::UnknownVersion(_)
        | MongoDistError::InvalidVersionFormat(_)
        | MongoDistError::InvalidPlatform(_)
        | MongoDistError::UnknownFeature(_)
        | MongoDistError::ConfigError(_) => 2,

        _ => 1,
    }
}
