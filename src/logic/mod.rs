// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 SALT/SAAO

//! Business logic: attachment resolution, archive assembly and the API client.

pub mod assembler;
pub mod package;
pub mod resolver;
pub mod submission;
