//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod raster;


pub use self::raster::{composite, crop, decode_tile, RasterTile};
