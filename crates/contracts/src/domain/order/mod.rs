pub mod aggregate;
pub mod draft;
pub mod edit;

pub use aggregate::{generate_order_number, Order, OrderId, OrderItem, OrderStats, StatusTransitionError};
pub use draft::{DraftItem, OrderCreatePayload, OrderDraft};
pub use edit::OrderEditForm;
