// ============================================================================
// Cart Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("Invalid cart quantity: {0}")]
    QuantityOutOfRange(u32),
}
