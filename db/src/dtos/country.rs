/// The mutable fields of a country row as the sync job wants them.
///
/// `created_at` is deliberately absent: it is set once on insert and
/// preserved on every later overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryUpsert {
    pub code: String,
    pub name: String,
    pub phone_code: String,
    pub currency_code: String,
}
