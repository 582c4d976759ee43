pub(super) mod data;
pub(super) mod generate;
pub(super) mod list;
