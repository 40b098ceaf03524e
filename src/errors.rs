// Copyright (c) 2025 SpendWise.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Validation failures raised at the service boundary before anything is
/// written. The store layer below never raises domain errors; missing rows
/// on delete are silently ignored.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    #[error("category cannot be null")]
    MissingCategory,

    #[error("user cannot be null")]
    MissingUser,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
