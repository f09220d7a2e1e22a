// [libs/core/tilemap/src/lib.rs]
//! Tile generation, index-jump traversal, and the map + presence bitmap
//! that backs Peach's memory-hard walk (§4.5–§4.7, C6/C7).

mod index_jump;
mod map;
mod tile;

pub use index_jump::{next_index, TILE_COUNT};
pub use map::{PeachMap, TileMapError};
pub use tile::{generate_tile, TILE_LEN};
