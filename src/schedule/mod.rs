pub(crate) mod animation_loop;
pub(crate) mod motion;
pub(crate) mod scheduler;
pub(crate) mod throttle;
