// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod analysis;
pub mod config;
pub mod error;
pub mod fetch;
pub mod request;
pub mod version;
