pub(crate) mod effect_session;
pub(crate) mod runtime;
