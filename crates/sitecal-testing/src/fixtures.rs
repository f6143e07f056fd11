//! Sample records in the layout the data directory stores them.

use serde_json::{Value, json};

/// Three jobs in January 2024:
/// - `1001`: A現場, 15th to 20th, staff 1 and 2, contractor 1, estimate 1
/// - `1002`: B現場, the 15th only, staff 3, contractor 2
/// - `1003`: C現場, 15th to 16th, staff 1 and a removed id `9`, no contractor
pub fn sample_jobs() -> Value {
    json!([
        {
            "id": "1001",
            "siteName": "A現場",
            "workContent": "外壁塗装",
            "contractorId": "1",
            "estimateId": "1",
            "notes": "足場あり",
            "workPeriodStart": "2024-01-15",
            "workPeriodEnd": "2024-01-20",
            "constructionPeriodStart": "2024-01-10",
            "constructionPeriodEnd": "2024-01-31",
            "selectedStaff": ["1", "2"],
            "createdAt": "2024-01-10T00:30:00.000Z"
        },
        {
            "id": "1002",
            "siteName": "B現場",
            "workContent": "配管交換",
            "contractorId": "2",
            "workPeriodStart": "2024-01-15",
            "workPeriodEnd": "2024-01-15",
            "selectedStaff": ["3"],
            "createdAt": "2024-01-11T09:00:00.000Z"
        },
        {
            "id": "1003",
            "siteName": "C現場",
            "workContent": "点検",
            "workPeriodStart": "2024-01-15",
            "workPeriodEnd": "2024-01-16",
            "selectedStaff": ["1", "9"],
            "createdAt": "2024-01-12T09:00:00.000Z"
        }
    ])
}

/// A two-person roster with one literal color.
pub fn sample_staff() -> Value {
    json!([
        { "id": "1", "name": "田中太郎", "color": "bg-blue-500", "position": "職長" },
        { "id": "2", "name": "佐藤花子", "color": "#123456" }
    ])
}
