//! Filter-field catalog
//!
//! Every filter id referenced by a report type must be defined here.

use crate::models::{FilterFieldDefinition, InputKind};

pub const CATEGORIES: &[&str] = &[
    "All Categories",
    "Electronics",
    "Furniture",
    "Stationery",
    "Hardware",
    "Packaging",
    "Apparel",
];

pub const STOCK_STATUSES: &[&str] = &[
    "All Status",
    "In Stock",
    "Low Stock",
    "Out of Stock",
    "Overstock",
];

pub const VENDORS: &[&str] = &[
    "All Vendors",
    "Apex Traders",
    "Bharat Supplies",
    "Crescent Industrial",
    "Deccan Distributors",
    "Everest Components",
    "Fortune Packaging",
];

pub const WAREHOUSES: &[&str] = &[
    "All Warehouses",
    "Mumbai Central",
    "Delhi North",
    "Bengaluru East",
    "Chennai Port",
];

pub const MOVEMENT_TYPES: &[&str] = &[
    "All Types",
    "Inbound",
    "Outbound",
    "Transfer",
    "Adjustment",
    "Return",
];

pub const ORDER_STATUSES: &[&str] = &[
    "All Orders",
    "Draft",
    "Pending",
    "Approved",
    "Received",
    "Cancelled",
];

pub const PAYMENT_STATUSES: &[&str] = &[
    "All Payments",
    "Paid",
    "Partially Paid",
    "Unpaid",
    "Overdue",
];

pub static FILTER_FIELDS: &[FilterFieldDefinition] = &[
    FilterFieldDefinition {
        id: "dateRange",
        label: "Date Range",
        icon: "calendar",
        kind: InputKind::DateRange,
        options: &[],
    },
    FilterFieldDefinition {
        id: "category",
        label: "Category",
        icon: "tag",
        kind: InputKind::Select,
        options: CATEGORIES,
    },
    FilterFieldDefinition {
        id: "stockStatus",
        label: "Stock Status",
        icon: "layers",
        kind: InputKind::Select,
        options: STOCK_STATUSES,
    },
    FilterFieldDefinition {
        id: "vendor",
        label: "Vendor",
        icon: "truck",
        kind: InputKind::Select,
        options: VENDORS,
    },
    FilterFieldDefinition {
        id: "warehouse",
        label: "Warehouse",
        icon: "home",
        kind: InputKind::Select,
        options: WAREHOUSES,
    },
    FilterFieldDefinition {
        id: "movementType",
        label: "Movement Type",
        icon: "repeat",
        kind: InputKind::Select,
        options: MOVEMENT_TYPES,
    },
    FilterFieldDefinition {
        id: "orderStatus",
        label: "Order Status",
        icon: "clipboard",
        kind: InputKind::Select,
        options: ORDER_STATUSES,
    },
    FilterFieldDefinition {
        id: "paymentStatus",
        label: "Payment Status",
        icon: "credit-card",
        kind: InputKind::Select,
        options: PAYMENT_STATUSES,
    },
];
