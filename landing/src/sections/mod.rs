// Landing page sections
// (c)2007–2025 Rosemere Limited

mod about;
mod chrome;
mod clients;
mod contact;
mod expertise;
mod footer;
mod footprint;
mod head;
mod hero;
mod icons;
mod nav;
mod vision;

pub use about::About;
pub use chrome::{Logo, ProgressBar};
pub use clients::Clients;
pub use contact::Contact;
pub use expertise::Expertise;
pub use footer::Footer;
pub use footprint::Footprint;
pub use head::PageHead;
pub use hero::Hero;
pub use nav::{MobileMenu, MobileMenuButton, Nav};
pub use vision::Vision;
