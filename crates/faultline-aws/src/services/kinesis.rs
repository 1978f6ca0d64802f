use crate::codes::kinesis as codes;

crate::define_aws_error! {
    /// Errors from Kinesis Data Streams
    pub struct KinesisError => "KinesisError", service = "kinesis" {
        not_found => (codes::STREAM_NOT_FOUND, "Kinesis stream not found"),
        access_denied => (codes::ACCESS_DENIED, "Kinesis access denied"),
        validation => (codes::VALIDATION_ERROR, "Invalid Kinesis request"),
        throttling => (codes::THROTTLED, "Kinesis throughput exceeded"),
        timeout => (codes::TIMEOUT, "Kinesis request timed out"),
        internal => (codes::INTERNAL_ERROR, "Kinesis internal error"),
    }
}
