/// Capability a cart needs to hold an item: a stable identifier, a display
/// description, a unit price in minor currency units, and a shipping weight.
pub trait Buyable {
    fn buyable_identifier(&self) -> &str;

    fn buyable_description(&self) -> &str;

    fn buyable_price(&self) -> u64;

    /// Weight in grams.
    fn buyable_weight(&self) -> u64;
}
