use crate::parser::{BindError, ErrorContext};

pub(crate) trait UserInterface {
    fn print_error(&self, error: &BindError);
    fn print_error_context(&self, error_context: ErrorContext);
}

pub(crate) struct ConsoleInterface {}

impl Default for ConsoleInterface {
    fn default() -> Self {
        Self {}
    }
}

impl UserInterface for ConsoleInterface {
    fn print_error(&self, error: &BindError) {
        eprintln!("Bind error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

/// Report a failed bind, returning the exit code for the caller to use.
pub(crate) fn report(
    error: &BindError,
    tokens: &[&str],
    user_interface: &(impl UserInterface + ?Sized),
) -> i32 {
    user_interface.print_error(error);

    if let Some(offset) = error.offset() {
        user_interface.print_error_context(ErrorContext::new(offset, tokens));
    }

    1
}
