/// 业务错误码
///
/// `ApiResponse.code` 使用的细分错误码，比 HTTP 状态码更精确。
/// 4xxxx 为客户端错误，5xxxx 为服务端错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 客户端错误
    BadRequest = 40000,
    ValidationFailed = 40001,
    NotificationNotFound = 40401,

    // 服务端错误
    InternalServerError = 50000,
    NotificationCreateFailed = 50001,
}
