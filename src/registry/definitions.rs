use serde::Serialize;

use crate::status::{Status, StyleTag};

/// Presentation metadata for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDefinition {
    pub status: Status,
    pub label: &'static str,
    pub style: StyleTag,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

type S = Status;

pub fn builtin_definition(status: Status) -> StatusDefinition {
    let (label, style, icon, color, description) = match status {
        S::Draft => (
            "草稿",
            StyleTag::Neutral,
            "fa-edit",
            "#6c757d",
            "任务已创建但未提交",
        ),
        S::Pending => (
            "待审核",
            StyleTag::Info,
            "fa-hourglass-half",
            "#17a2b8",
            "任务已提交，等待管理员审核",
        ),
        S::Approved => (
            "已通过",
            StyleTag::Primary,
            "fa-check",
            "#007bff",
            "任务已通过审核",
        ),
        S::Scheduled => (
            "已排程",
            StyleTag::Warning,
            "fa-calendar",
            "#ffc107",
            "任务已安排执行时间",
        ),
        S::InProgress => (
            "进行中",
            StyleTag::Warning,
            "fa-spinner fa-spin",
            "#ffc107",
            "任务正在执行中",
        ),
        S::Completed => (
            "已完成",
            StyleTag::Success,
            "fa-check-circle",
            "#28a745",
            "任务已完成",
        ),
        S::Rejected => (
            "已驳回",
            StyleTag::Danger,
            "fa-times",
            "#dc3545",
            "任务被驳回，需要修改后重新提交",
        ),
        S::Cancelled => (
            "已取消",
            StyleTag::Neutral,
            "fa-ban",
            "#6c757d",
            "任务已被取消",
        ),
    };

    StatusDefinition {
        status,
        label,
        style,
        icon,
        color,
        description,
    }
}
