// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod filter;
pub mod ids;
pub mod login;
pub mod model;
pub mod pagination;
pub mod route;
pub mod sidebar;
pub mod state;
pub mod stats;
pub mod table;

pub use filter::*;
pub use ids::*;
pub use login::*;
pub use model::*;
pub use pagination::*;
pub use route::*;
pub use sidebar::*;
pub use state::*;
pub use stats::*;
pub use table::*;
