pub(crate) mod activation_moment;
pub(crate) mod announcement;
pub(crate) mod brand_reveal;
pub(crate) mod kinetic_stat;
pub(crate) mod layout;
pub mod palette;
pub(crate) mod scene;
pub(crate) mod terminal;
