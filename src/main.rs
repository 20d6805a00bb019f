// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use seqlogo::errors::LogoError;

fn main() -> Result<(), LogoError> {
    seqlogo::run()
}
