pub(crate) mod dashboard;
pub(crate) mod login;
pub(crate) mod marketing;
pub(crate) mod signup;
