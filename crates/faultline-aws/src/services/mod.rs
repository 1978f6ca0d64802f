//! One leaf per AWS dependency

mod dynamodb;
mod kinesis;
mod kms;
mod s3;
mod secrets_manager;
mod sqs;
mod ssm;

pub use dynamodb::DynamoDbError;
pub use kinesis::KinesisError;
pub use kms::KmsError;
pub use s3::S3Error;
pub use secrets_manager::SecretsManagerError;
pub use sqs::SqsError;
pub use ssm::SsmError;
