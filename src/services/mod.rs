// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analyzer;
pub mod checks;
pub mod document;
pub mod fetcher;
pub mod logging;
pub mod report;
pub mod scorer;
