// Studio page sections

/// Studio name shown in the nav and footer.
pub const BRAND: &str = "ArtzyBear";

/// Overall commission price range, shown in the hero and above the form.
pub const PRICE_RANGE: &str = "₹4,400 - ₹23,900";

mod about;
mod commission;
mod contact;
mod footer;
mod hero;
mod nav;
mod portfolio;

pub use about::About;
pub use commission::CommissionSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use portfolio::Portfolio;
