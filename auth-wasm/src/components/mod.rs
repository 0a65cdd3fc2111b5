pub(crate) mod navbar;
pub(crate) mod toast_stack;
