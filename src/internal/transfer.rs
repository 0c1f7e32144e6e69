//! 下载引擎：重定向解析、能力探测、分块规划，以及多线程分块下载与单线程回退。

pub mod functions;
pub mod structs;
pub mod traits;
