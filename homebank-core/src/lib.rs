//! homebank-core: HomeBank record model, header detection, amount/date
//! normalization and the CSV writer shared by all converters.

pub mod amount;
pub mod date;
pub mod error;
pub mod header;
pub mod record;
pub mod writer;

pub use error::ConvertError;
pub use header::{find_header, is_header};
pub use record::{HomebankRecord, PaymentMethod};
pub use writer::{write_file, write_records};
