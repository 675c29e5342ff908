pub mod api_utils;
pub mod confirm;
pub mod debounce;
pub mod fetch_seq;
pub mod notify;
pub mod selection;
