// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Page objects - Fields specific to one master screen
//
// Header fields (code, name, description), saving and listing operations
// live in the shared actions; a page only covers what its form adds.

mod document_type;
mod stock_adjustment_reason;

pub use document_type::DocumentTypePage;
pub use stock_adjustment_reason::StockAdjustmentReasonPage;
