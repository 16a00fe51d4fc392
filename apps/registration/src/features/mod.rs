pub(crate) mod registration;
