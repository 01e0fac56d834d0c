mod legacy;
mod system;

pub use legacy::CarrierClipboard;
pub use system::SystemClipboard;
