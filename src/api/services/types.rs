use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// API 错误码枚举
///
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,
    NotFound = 1004,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 存储健康检查状态
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStoreCheck {
    pub status: String,
    pub links_count: usize,
    pub next_id: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthChecks {
    pub store: HealthStoreCheck,
}

/// 健康检查响应
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub checks: HealthChecks,
    pub response_time_ms: u32,
}
