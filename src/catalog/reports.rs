//! Report type catalog

use crate::models::ReportConfig;

pub static REPORTS: &[ReportConfig] = &[
    ReportConfig {
        key: "inventory-summary",
        title: "Inventory Summary",
        icon: "package",
        category: "inventory",
        filters: &["dateRange", "category", "stockStatus", "warehouse"],
        columns: &[
            "Product Code",
            "Product Name",
            "Category",
            "Warehouse",
            "Stock Qty",
            "Unit Price",
            "Total Value",
            "Stock Status",
            "Last Updated",
        ],
        summary_stats: &["totalRecords", "totalValue", "lowStockItems", "outOfStockItems"],
    },
    ReportConfig {
        key: "stock-movement",
        title: "Stock Movement",
        icon: "repeat",
        category: "inventory",
        filters: &["dateRange", "category", "movementType", "warehouse"],
        columns: &[
            "Movement ID",
            "Movement Date",
            "Product Name",
            "Movement Type",
            "Quantity",
            "Warehouse",
            "Reference No",
        ],
        summary_stats: &["totalRecords", "totalQuantity"],
    },
    ReportConfig {
        key: "low-stock-alert",
        title: "Low Stock Alert",
        icon: "alert-triangle",
        category: "inventory",
        filters: &["category", "vendor", "warehouse"],
        columns: &[
            "Product Code",
            "Product Name",
            "Category",
            "Stock Qty",
            "Reorder Level",
            "Vendor Name",
            "Stock Status",
        ],
        summary_stats: &["totalRecords", "lowStockItems", "outOfStockItems"],
    },
    ReportConfig {
        key: "vendor-performance",
        title: "Vendor Performance",
        icon: "truck",
        category: "vendors",
        filters: &["dateRange", "vendor", "category"],
        columns: &[
            "Vendor ID",
            "Vendor Name",
            "Total Orders",
            "Total Amount",
            "On-Time Delivery",
            "Quality Rating",
            "Last Order Date",
        ],
        summary_stats: &["totalRecords", "totalAmount", "avgOnTimeDelivery"],
    },
    ReportConfig {
        key: "purchase-orders",
        title: "Purchase Orders",
        icon: "shopping-cart",
        category: "purchasing",
        filters: &["dateRange", "vendor", "orderStatus", "paymentStatus"],
        columns: &[
            "PO Number",
            "Order Date",
            "Vendor Name",
            "Items",
            "Total Amount",
            "Order Status",
            "Payment Status",
            "Expected Delivery Date",
            "Remarks",
        ],
        summary_stats: &["totalRecords", "totalAmount", "pendingOrders"],
    },
    ReportConfig {
        key: "sales-analysis",
        title: "Sales Analysis",
        icon: "trending-up",
        category: "sales",
        filters: &["dateRange", "category", "warehouse"],
        columns: &[
            "Invoice No",
            "Sale Date",
            "Product Name",
            "Category",
            "Quantity",
            "Unit Price",
            "Total Amount",
            "Profit Margin",
        ],
        summary_stats: &["totalRecords", "totalAmount", "totalQuantity", "avgProfitMargin"],
    },
];
