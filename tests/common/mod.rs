//! Shared test helpers.

use alertdecoder::AlertDecoder;

pub fn setup() -> AlertDecoder {
    AlertDecoder::new(":memory:").unwrap()
}
