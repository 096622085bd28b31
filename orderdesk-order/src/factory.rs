use crate::codec::{self, CodecError, Record};
use crate::models::Order;
use crate::OrderError;

/// Decodes one stored record into a live order variant.
pub type RecordDecoder = fn(&Record) -> Result<Order, CodecError>;

/// Resolves a discriminant tag to the matching variant decoder. The tag set
/// is closed; anything outside it is an [`OrderError::InvalidOrderType`].
pub fn decoder_for(tag: &str) -> Result<RecordDecoder, OrderError> {
    match tag {
        "online" => Ok(codec::online_from_record),
        "phone" => Ok(codec::phone_from_record),
        "store" => Ok(codec::store_from_record),
        other => Err(OrderError::InvalidOrderType(other.to_string())),
    }
}

/// Reconstructs an order from a stored record, dispatching on its `type` tag.
pub fn order_from_record(record: &Record) -> Result<Order, OrderError> {
    let tag = codec::require_str(record, "type").map_err(OrderError::Codec)?;
    Ok(decoder_for(tag)?(record)?)
}
