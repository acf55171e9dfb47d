//! 截止时间过滤 - 流程层
//!
//! 纯谓词：判断作业是否"有截止时间且尚未过期"。
//! 字段不完整时宁可多显示，绝不因为无法判定过期而静默跳过

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::CourseWork;

/// 过期判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// 已过期
    Overdue,
    /// 未过期
    Upcoming,
    /// 字段不完整或日期非法，无法判定（按未过期处理）
    Indeterminate,
}

/// 作业是否带有截止时间
///
/// 只要求 due_date 和 due_time 对象同时存在，不要求字段完整
pub fn has_due_date(work: &CourseWork) -> bool {
    work.due_date.is_some() && work.due_time.is_some()
}

/// 判定作业相对 `now` 的过期状态
///
/// 年、月、日、时、分五个字段全部存在才构造时间做比较；
/// 任何字段缺失都返回 Indeterminate，绝不断言过期
pub fn due_status(work: &CourseWork, now: NaiveDateTime) -> DueStatus {
    let (Some(due_date), Some(due_time)) = (&work.due_date, &work.due_time) else {
        return DueStatus::Indeterminate;
    };

    let (Some(year), Some(month), Some(day)) = (due_date.year, due_date.month, due_date.day)
    else {
        return DueStatus::Indeterminate;
    };
    let (Some(hours), Some(minutes)) = (due_time.hours, due_time.minutes) else {
        return DueStatus::Indeterminate;
    };

    let Some(due) = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hours, minutes, 0))
    else {
        return DueStatus::Indeterminate;
    };

    if due <= now {
        DueStatus::Overdue
    } else {
        DueStatus::Upcoming
    }
}

/// 作业是否符合展示条件：有截止时间对象，且未判定为过期
pub fn is_eligible(work: &CourseWork, now: NaiveDateTime) -> bool {
    has_due_date(work) && due_status(work, now) != DueStatus::Overdue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DueDate, DueTime};

    fn work_with(due_date: Option<DueDate>, due_time: Option<DueTime>) -> CourseWork {
        CourseWork {
            id: "w1".to_string(),
            course_id: "c1".to_string(),
            title: "测试作业".to_string(),
            description: None,
            due_date,
            due_time,
        }
    }

    fn full_date(year: i32, month: u32, day: u32) -> Option<DueDate> {
        Some(DueDate {
            year: Some(year),
            month: Some(month),
            day: Some(day),
        })
    }

    fn full_time(hours: u32, minutes: u32) -> Option<DueTime> {
        Some(DueTime {
            hours: Some(hours),
            minutes: Some(minutes),
        })
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 4)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_future_due_is_eligible() {
        let work = work_with(full_date(2099, 1, 1), full_time(0, 0));
        assert_eq!(due_status(&work, now()), DueStatus::Upcoming);
        assert!(is_eligible(&work, now()));
    }

    #[test]
    fn test_past_due_is_excluded() {
        let work = work_with(full_date(2000, 1, 1), full_time(0, 0));
        assert_eq!(due_status(&work, now()), DueStatus::Overdue);
        assert!(!is_eligible(&work, now()));
    }

    #[test]
    fn test_due_exactly_now_is_overdue() {
        let work = work_with(full_date(2026, 8, 4), full_time(12, 0));
        assert_eq!(due_status(&work, now()), DueStatus::Overdue);
    }

    #[test]
    fn test_partial_due_time_is_kept() {
        // 小时缺失：无法断言过期，仍然展示
        let work = work_with(
            full_date(2000, 1, 1),
            Some(DueTime {
                hours: None,
                minutes: Some(9),
            }),
        );
        assert_eq!(due_status(&work, now()), DueStatus::Indeterminate);
        assert!(is_eligible(&work, now()));
    }

    #[test]
    fn test_partial_due_date_is_kept() {
        let work = work_with(
            Some(DueDate {
                year: Some(2000),
                month: None,
                day: Some(1),
            }),
            full_time(0, 0),
        );
        assert_eq!(due_status(&work, now()), DueStatus::Indeterminate);
        assert!(is_eligible(&work, now()));
    }

    #[test]
    fn test_missing_due_object_is_not_eligible() {
        let work = work_with(None, full_time(0, 0));
        assert!(!has_due_date(&work));
        assert!(!is_eligible(&work, now()));

        let work = work_with(full_date(2099, 1, 1), None);
        assert!(!has_due_date(&work));
        assert!(!is_eligible(&work, now()));
    }

    #[test]
    fn test_invalid_calendar_date_is_indeterminate() {
        let work = work_with(full_date(2026, 13, 1), full_time(0, 0));
        assert_eq!(due_status(&work, now()), DueStatus::Indeterminate);
        assert!(is_eligible(&work, now()));
    }
}
