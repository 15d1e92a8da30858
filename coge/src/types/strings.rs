use aliri_braid::braid;

/// CoGe user's username.
#[braid(serde)]
pub struct Username;
