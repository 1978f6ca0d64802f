//! Canonical error logging macro

/// Log a handled error as one structured event
///
/// Accepts anything that is `AsRef<AppError>` (the base type or any leaf).
/// Operational errors log at `warn`, defects at `error`. Extra `tracing`
/// fields may follow the error.
///
/// # Example
///
/// ```
/// use faultline_errors::{AppError, ConditionCatalog, ErrorOptions};
/// use faultline_logging::log_app_error;
///
/// let err = AppError::internal(None, ErrorOptions::new());
/// log_app_error!("load_profile", err, user_id = 7);
/// ```
#[macro_export]
macro_rules! log_app_error {
    ($op:expr, $err:expr) => {
        $crate::log_app_error!($op, $err,)
    };
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let err_ref = &$err;
        let app_err: &$crate::__private::AppError = ::std::convert::AsRef::as_ref(err_ref);
        if app_err.is_operational() {
            $crate::__private::tracing::warn!(
                component = module_path!(),
                op = $op,
                event = $crate::__private::schema::EVENT_ERROR,
                err.name = app_err.name(),
                err.code = app_err.code(),
                err.status = app_err.status(),
                err.operational = true,
                message = app_err.message(),
                $($field)*
            );
        } else {
            $crate::__private::tracing::error!(
                component = module_path!(),
                op = $op,
                event = $crate::__private::schema::EVENT_ERROR,
                err.name = app_err.name(),
                err.code = app_err.code(),
                err.status = app_err.status(),
                err.operational = false,
                message = app_err.message(),
                $($field)*
            );
        }
    }};
}
