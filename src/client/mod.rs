// Client interaction controller exports
pub mod api;
pub mod driver;
pub mod layout;
pub mod state;
pub mod typing;
pub mod view;

pub use api::{ClientError, ProxyClient, SentenceApi};
pub use driver::Driver;
pub use layout::{hero_height, scale_banner, BannerLayout, Dimensions, HeroLayout, Viewport};
pub use state::{Command, Controller, Event, Phase, Ticket};
pub use typing::Typewriter;
pub use view::{ElementId, View};
