//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod writer;

#[cfg(test)]
mod writer_test;

pub use self::writer::{ImageWriter, OutputFormat};
