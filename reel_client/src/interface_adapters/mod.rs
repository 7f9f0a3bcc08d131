// Interface adapters: HTTP outcome client, wire protocol, tween engine,
// symbol assets and the headless views.

pub mod assets;
pub mod clients;
pub mod protocol;
pub mod shell;
pub mod tween;
pub mod view;
