//! 核心层：客户端与服务端共享的契约、常量以及服务端的错误和中间件

pub mod constant;
pub mod error;
pub mod middleware;
pub mod model;
pub mod response;
