//! Role-aware page composition.
//!
//! Each page is assembled for the acting employee from the services:
//! managers choose whose goals to look at, employees only ever see their own.

mod views;

pub use views::{
    AssignedGoal, FeedbackItem, FeedbackView, GoalFeedback, GoalProgress, GoalReport,
    GoalSettingView, InsightsView, Metric, NavigationView, ProgressView, ReportTask, ReportView,
    Section, TaskItem,
};

use std::sync::Arc;

use crate::config::{FEEDBACK_TIMESTAMP_FORMAT, REPORT_DATE_FORMAT};
use crate::domain::{
    team_members, Employee, FeedbackEntry, Goal, GoalStatus, ProfileResponse, Task, TaskProgress,
};
use crate::errors::{AppError, AppResult};
use crate::services::{parallel, ServiceContainer};

pub const NO_ASSIGNABLE_EMPLOYEES: &str = "No employees found to assign goals to.";
pub const NO_ASSIGNED_GOALS: &str = "You have no goals assigned.";
pub const NO_TASKS_YET: &str = "No tasks yet.";
pub const NO_EMPLOYEES_TO_TRACK: &str = "No employees to track.";
pub const NO_GOALS_TO_TRACK: &str = "No goals to track for this user.";
pub const NO_FEEDBACK_YET: &str = "No feedback has been given for this goal yet.";
pub const NO_GOALS_FOR_FEEDBACK: &str = "This employee has no goals to provide feedback on.";
pub const NO_EMPLOYEES_FOR_REPORTING: &str = "No employees available for reporting.";
pub const NO_PERFORMANCE_DATA: &str = "No performance data available for this user.";
pub const NO_TASKS_LOGGED: &str = "No tasks logged for this goal.";
pub const NO_FEEDBACK_RECORDED: &str = "No feedback recorded for this goal.";

const LABEL_APPROVED: &str = "Approved";
const LABEL_PENDING_APPROVAL: &str = "Pending Approval";
const LABEL_PENDING: &str = "Pending";

/// Profiles offered to the viewer and the one currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSelection {
    pub choices: Vec<Employee>,
    pub selected: Option<Employee>,
}

/// Resolve whose data a page shows.
///
/// Managers may pick among `choices` (themselves first when `include_viewer`
/// is set, then the team) and default to the first choice. Everyone else is
/// pinned to themselves and gets `Forbidden` for any other id.
pub fn select_target(
    viewer: &Employee,
    employees: &[Employee],
    requested: Option<i32>,
    include_viewer: bool,
) -> AppResult<TargetSelection> {
    if !viewer.is_manager() {
        return match requested {
            Some(id) if id != viewer.id => Err(AppError::Forbidden),
            _ => Ok(TargetSelection {
                choices: Vec::new(),
                selected: Some(viewer.clone()),
            }),
        };
    }

    let team = team_members(employees);
    let choices: Vec<Employee> = if include_viewer && !team.is_empty() {
        std::iter::once(viewer.clone()).chain(team).collect()
    } else {
        team
    };

    let selected = match requested {
        Some(id) if include_viewer && id == viewer.id => Some(viewer.clone()),
        Some(id) => match choices.iter().find(|e| e.id == id) {
            Some(employee) => Some(employee.clone()),
            None if employees.iter().any(|e| e.id == id) => return Err(AppError::Forbidden),
            None => return Err(AppError::NotFound),
        },
        None if include_viewer => Some(viewer.clone()),
        None => choices.first().cloned(),
    };

    Ok(TargetSelection { choices, selected })
}

fn profiles(employees: Vec<Employee>) -> Vec<ProfileResponse> {
    employees.into_iter().map(ProfileResponse::from).collect()
}

fn notice_if(empty: bool, message: &str) -> Option<String> {
    empty.then(|| message.to_string())
}

fn feedback_item(entry: FeedbackEntry) -> FeedbackItem {
    FeedbackItem {
        timestamp: entry.created_at.format(FEEDBACK_TIMESTAMP_FORMAT).to_string(),
        author: entry.author,
        text: entry.feedback_text,
    }
}

fn report_line(entry: &FeedbackEntry) -> String {
    format!(
        "[{}] from {}: {}",
        entry.created_at.format(REPORT_DATE_FORMAT),
        entry.author,
        entry.feedback_text
    )
}

/// Builds page view models on top of the service container.
#[derive(Clone)]
pub struct PageBuilder {
    services: Arc<dyn ServiceContainer>,
}

impl PageBuilder {
    pub fn new(services: Arc<dyn ServiceContainer>) -> Self {
        Self { services }
    }

    pub fn navigation(&self, viewer: &Employee) -> NavigationView {
        NavigationView {
            sections: Section::available_to(viewer.role()),
            user: ProfileResponse::from(viewer.clone()),
        }
    }

    /// Goal & Task Setting page
    pub async fn goal_setting(&self, viewer: &Employee) -> AppResult<GoalSettingView> {
        let is_manager = viewer.is_manager();

        let (employees, goals) = parallel::join2(
            self.services.employees().list_employees(),
            self.services.goals().list_goals(viewer.id),
        )
        .await?;

        let assignable = if is_manager {
            team_members(&employees)
        } else {
            Vec::new()
        };

        let tasks = self.services.tasks();
        let goals = parallel::join_all(
            goals
                .into_iter()
                .map(|goal| {
                    let tasks = tasks.clone();
                    async move {
                        let items = tasks.list_tasks(goal.id).await?;
                        Ok::<_, AppError>(assigned_goal(goal, items, is_manager))
                    }
                })
                .collect(),
        )
        .await?;

        Ok(GoalSettingView {
            can_assign_goals: is_manager,
            assign_notice: notice_if(is_manager && assignable.is_empty(), NO_ASSIGNABLE_EMPLOYEES),
            assignable_employees: profiles(assignable),
            notice: notice_if(goals.is_empty(), NO_ASSIGNED_GOALS),
            goals,
        })
    }

    /// Progress Tracking page
    pub async fn progress(
        &self,
        viewer: &Employee,
        requested: Option<i32>,
    ) -> AppResult<ProgressView> {
        let is_manager = viewer.is_manager();
        let employees = self.services.employees().list_employees().await?;
        let selection = select_target(viewer, &employees, requested, true)?;
        let target = selection.selected.unwrap_or_else(|| viewer.clone());

        let goals = self.services.goals().list_goals(target.id).await?;
        let tasks = self.services.tasks();
        let goals = parallel::join_all(
            goals
                .into_iter()
                .map(|goal| {
                    let tasks = tasks.clone();
                    async move {
                        let items = tasks.list_tasks(goal.id).await?;
                        Ok::<_, AppError>(GoalProgress {
                            id: goal.id,
                            description: goal.description,
                            status: goal.status,
                            due_date: goal.due_date,
                            status_options: if is_manager {
                                GoalStatus::ALL.to_vec()
                            } else {
                                Vec::new()
                            },
                            progress: TaskProgress::from_tasks(&items),
                        })
                    }
                })
                .collect(),
        )
        .await?;

        Ok(ProgressView {
            target: ProfileResponse::from(target),
            choices_notice: notice_if(
                is_manager && selection.choices.is_empty(),
                NO_EMPLOYEES_TO_TRACK,
            ),
            choices: profiles(selection.choices),
            notice: notice_if(goals.is_empty(), NO_GOALS_TO_TRACK),
            goals,
        })
    }

    /// Feedback page
    pub async fn feedback(
        &self,
        viewer: &Employee,
        requested: Option<i32>,
    ) -> AppResult<FeedbackView> {
        let can_submit = viewer.is_manager();
        let employees = self.services.employees().list_employees().await?;
        let selection = select_target(viewer, &employees, requested, true)?;
        let target = selection.selected.unwrap_or_else(|| viewer.clone());

        let goals = self.services.goals().list_goals(target.id).await?;
        let feedback = self.services.feedback();
        let goals = parallel::join_all(
            goals
                .into_iter()
                .map(|goal| {
                    let feedback = feedback.clone();
                    async move {
                        let entries = feedback.list_feedback(goal.id).await?;
                        Ok::<_, AppError>(GoalFeedback {
                            id: goal.id,
                            description: goal.description,
                            status: goal.status,
                            feedback_notice: notice_if(entries.is_empty(), NO_FEEDBACK_YET),
                            feedback: entries.into_iter().map(feedback_item).collect(),
                            can_submit,
                        })
                    }
                })
                .collect(),
        )
        .await?;

        Ok(FeedbackView {
            target: ProfileResponse::from(target),
            choices: profiles(selection.choices),
            notice: notice_if(goals.is_empty(), NO_GOALS_FOR_FEEDBACK),
            goals,
        })
    }

    /// Performance history report
    pub async fn reporting(
        &self,
        viewer: &Employee,
        requested: Option<i32>,
    ) -> AppResult<ReportView> {
        let employees = self.services.employees().list_employees().await?;
        let selection = select_target(viewer, &employees, requested, false)?;

        let Some(target) = selection.selected else {
            return Ok(ReportView {
                target: None,
                choices: Vec::new(),
                goals: Vec::new(),
                notice: Some(NO_EMPLOYEES_FOR_REPORTING.to_string()),
            });
        };

        let goals = self.services.goals().list_goals(target.id).await?;
        let tasks = self.services.tasks();
        let feedback = self.services.feedback();
        let goals = parallel::join_all(
            goals
                .into_iter()
                .map(|goal| {
                    let tasks = tasks.clone();
                    let feedback = feedback.clone();
                    async move {
                        let (items, entries) = parallel::join2(
                            tasks.list_tasks(goal.id),
                            feedback.list_feedback(goal.id),
                        )
                        .await?;
                        Ok::<_, AppError>(goal_report(goal, items, entries))
                    }
                })
                .collect(),
        )
        .await?;

        Ok(ReportView {
            target: Some(ProfileResponse::from(target)),
            choices: profiles(selection.choices),
            notice: notice_if(goals.is_empty(), NO_PERFORMANCE_DATA),
            goals,
        })
    }

    /// Business Insights dashboard, managers only
    pub async fn insights(&self, viewer: &Employee) -> AppResult<InsightsView> {
        if !viewer.is_manager() {
            return Err(AppError::Forbidden);
        }

        let insights = self.services.insights().performance_insights().await?;

        Ok(InsightsView {
            metrics: vec![
                Metric {
                    label: "Total Goals Set".to_string(),
                    value: insights.total_goals.to_string(),
                },
                Metric {
                    label: "Avg Goals Per Employee".to_string(),
                    value: insights.average_goals_per_employee,
                },
            ],
            goals_by_status: insights.goals_by_status,
            top_performer: insights.top_performer,
            lowest_performer: insights.lowest_performer,
        })
    }
}

fn assigned_goal(goal: Goal, tasks: Vec<Task>, viewer_is_manager: bool) -> AssignedGoal {
    AssignedGoal {
        id: goal.id,
        description: goal.description,
        due_date: goal.due_date,
        status: goal.status,
        tasks_notice: notice_if(tasks.is_empty(), NO_TASKS_YET),
        tasks: tasks
            .into_iter()
            .map(|task| TaskItem {
                id: task.id,
                label: if task.is_approved {
                    LABEL_APPROVED
                } else {
                    LABEL_PENDING_APPROVAL
                }
                .to_string(),
                can_approve: viewer_is_manager && !task.is_approved,
                description: task.description,
            })
            .collect(),
        can_log_tasks: !viewer_is_manager,
    }
}

fn goal_report(goal: Goal, tasks: Vec<Task>, feedback: Vec<FeedbackEntry>) -> GoalReport {
    GoalReport {
        id: goal.id,
        description: goal.description,
        status: goal.status,
        due_date: goal.due_date,
        tasks_notice: notice_if(tasks.is_empty(), NO_TASKS_LOGGED),
        tasks: tasks
            .into_iter()
            .map(|task| ReportTask {
                label: if task.is_approved {
                    LABEL_APPROVED
                } else {
                    LABEL_PENDING
                }
                .to_string(),
                description: task.description,
            })
            .collect(),
        feedback_notice: notice_if(feedback.is_empty(), NO_FEEDBACK_RECORDED),
        feedback: feedback.iter().map(report_line).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InsightFigures;
    use crate::infra::repositories::{
        MockEmployeeRepository, MockFeedbackRepository, MockGoalRepository,
        MockInsightsRepository, MockTaskRepository,
    };
    use crate::services::testing::TestUnitOfWork;
    use crate::services::{
        EmployeeManager, FeedbackManager, GoalManager, InsightsReporter, Services, TaskManager,
    };
    use chrono::NaiveDate;

    fn employee(id: i32, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            manager_id: if name.contains("Manager") { None } else { Some(1) },
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, "Alice Manager"),
            employee(2, "Bob Smith"),
            employee(3, "Charlie Brown"),
            employee(4, "Zed Manager"),
        ]
    }

    fn goal(id: i32, employee_id: i32) -> Goal {
        Goal {
            id,
            employee_id,
            description: format!("Goal {}", id),
            due_date: NaiveDate::from_ymd_opt(2031, 6, 30).unwrap(),
            status: GoalStatus::InProgress,
        }
    }

    fn task(id: i32, goal_id: i32, is_approved: bool) -> Task {
        Task {
            id,
            goal_id,
            description: format!("Task {}", id),
            is_approved,
        }
    }

    fn builder(uow: TestUnitOfWork) -> PageBuilder {
        let uow = Arc::new(uow);
        let services = Services::new(
            Arc::new(EmployeeManager::new(uow.clone())),
            Arc::new(GoalManager::new(uow.clone())),
            Arc::new(TaskManager::new(uow.clone())),
            Arc::new(FeedbackManager::new(uow.clone())),
            Arc::new(InsightsReporter::new(uow)),
        );
        PageBuilder::new(Arc::new(services))
    }

    fn listed(employees: Vec<Employee>) -> MockEmployeeRepository {
        let mut repo = MockEmployeeRepository::new();
        repo.expect_list().returning(move || Ok(employees.clone()));
        repo
    }

    #[test]
    fn test_manager_defaults_to_self() {
        let all = staff();
        let selection = select_target(&all[0], &all, None, true).unwrap();

        let ids: Vec<i32> = selection.choices.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(selection.selected.map(|e| e.id), Some(1));
    }

    #[test]
    fn test_manager_reporting_defaults_to_first_team_member() {
        let all = staff();
        let selection = select_target(&all[0], &all, None, false).unwrap();

        assert_eq!(selection.choices.len(), 2);
        assert_eq!(selection.selected.map(|e| e.id), Some(2));
    }

    #[test]
    fn test_manager_cannot_pick_another_manager() {
        let all = staff();
        let result = select_target(&all[0], &all, Some(4), true);
        assert!(matches!(result, Err(AppError::Forbidden)));

        let result = select_target(&all[0], &all, Some(99), true);
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[test]
    fn test_manager_without_team() {
        let all = vec![employee(1, "Alice Manager")];

        let progress = select_target(&all[0], &all, None, true).unwrap();
        assert!(progress.choices.is_empty());
        assert_eq!(progress.selected.map(|e| e.id), Some(1));

        let report = select_target(&all[0], &all, None, false).unwrap();
        assert!(report.selected.is_none());
    }

    #[test]
    fn test_employee_is_pinned_to_self() {
        let all = staff();
        let selection = select_target(&all[1], &all, Some(2), true).unwrap();
        assert!(selection.choices.is_empty());
        assert_eq!(selection.selected.map(|e| e.id), Some(2));

        let result = select_target(&all[1], &all, Some(3), true);
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_goal_setting_for_employee() {
        let mut goals = MockGoalRepository::new();
        goals
            .expect_list_for_employee()
            .returning(|employee_id| Ok(vec![goal(7, employee_id)]));
        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_list_for_goal()
            .returning(|goal_id| Ok(vec![task(1, goal_id, true), task(2, goal_id, false)]));

        let pages = builder(
            TestUnitOfWork::new()
                .with_employees(listed(staff()))
                .with_goals(goals)
                .with_tasks(tasks),
        );
        let view = pages.goal_setting(&staff()[1]).await.unwrap();

        assert!(!view.can_assign_goals);
        assert!(view.assignable_employees.is_empty());
        assert!(view.assign_notice.is_none());
        assert_eq!(view.goals.len(), 1);

        let card = &view.goals[0];
        assert!(card.can_log_tasks);
        assert_eq!(card.tasks[0].label, "Approved");
        assert_eq!(card.tasks[1].label, "Pending Approval");
        assert!(card.tasks.iter().all(|t| !t.can_approve));
    }

    #[tokio::test]
    async fn test_goal_setting_for_manager_without_goals() {
        let mut goals = MockGoalRepository::new();
        goals.expect_list_for_employee().returning(|_| Ok(Vec::new()));

        let pages = builder(
            TestUnitOfWork::new()
                .with_employees(listed(staff()))
                .with_goals(goals),
        );
        let view = pages.goal_setting(&staff()[0]).await.unwrap();

        assert!(view.can_assign_goals);
        let names: Vec<&str> = view
            .assignable_employees
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bob Smith", "Charlie Brown"]);
        assert_eq!(view.notice.as_deref(), Some(NO_ASSIGNED_GOALS));
    }

    #[tokio::test]
    async fn test_progress_counts_approved_tasks() {
        let mut goals = MockGoalRepository::new();
        goals
            .expect_list_for_employee()
            .returning(|employee_id| Ok(vec![goal(5, employee_id)]));
        let mut tasks = MockTaskRepository::new();
        tasks.expect_list_for_goal().returning(|goal_id| {
            Ok(vec![
                task(1, goal_id, true),
                task(2, goal_id, false),
                task(3, goal_id, false),
            ])
        });

        let pages = builder(
            TestUnitOfWork::new()
                .with_employees(listed(staff()))
                .with_goals(goals)
                .with_tasks(tasks),
        );
        let view = pages.progress(&staff()[0], Some(2)).await.unwrap();

        assert_eq!(view.target.id, 2);
        assert_eq!(view.choices.len(), 3);
        let progress = view.goals[0].progress;
        assert_eq!((progress.approved, progress.total, progress.percent), (1, 3, 33));
        assert_eq!(view.goals[0].status_options.len(), 4);
    }

    #[tokio::test]
    async fn test_feedback_page_formats_entries() {
        let mut goals = MockGoalRepository::new();
        goals
            .expect_list_for_employee()
            .returning(|employee_id| Ok(vec![goal(5, employee_id), goal(6, employee_id)]));
        let mut feedback = MockFeedbackRepository::new();
        feedback.expect_list_for_goal().returning(|goal_id| {
            if goal_id == 5 {
                Ok(vec![FeedbackEntry {
                    id: 1,
                    goal_id,
                    feedback_text: "Keep going".to_string(),
                    author: "Alice Manager".to_string(),
                    created_at: NaiveDate::from_ymd_opt(2030, 5, 4)
                        .unwrap()
                        .and_hms_opt(9, 5, 30)
                        .unwrap(),
                }])
            } else {
                Ok(Vec::new())
            }
        });

        let pages = builder(
            TestUnitOfWork::new()
                .with_employees(listed(staff()))
                .with_goals(goals)
                .with_feedback(feedback),
        );
        let view = pages.feedback(&staff()[1], None).await.unwrap();

        assert_eq!(view.target.id, 2);
        assert!(!view.goals[0].can_submit);
        assert_eq!(view.goals[0].feedback[0].timestamp, "2030-05-04 09:05");
        assert_eq!(view.goals[1].feedback_notice.as_deref(), Some(NO_FEEDBACK_YET));
    }

    #[tokio::test]
    async fn test_reporting_lines() {
        let mut goals = MockGoalRepository::new();
        goals
            .expect_list_for_employee()
            .returning(|employee_id| Ok(vec![goal(5, employee_id)]));
        let mut tasks = MockTaskRepository::new();
        tasks
            .expect_list_for_goal()
            .returning(|goal_id| Ok(vec![task(1, goal_id, false)]));
        let mut feedback = MockFeedbackRepository::new();
        feedback.expect_list_for_goal().returning(|goal_id| {
            Ok(vec![FeedbackEntry {
                id: 1,
                goal_id,
                feedback_text: "Great job on completing this goal!".to_string(),
                author: "Alice Manager".to_string(),
                created_at: NaiveDate::from_ymd_opt(2030, 1, 2)
                    .unwrap()
                    .and_hms_opt(18, 0, 0)
                    .unwrap(),
            }])
        });

        let pages = builder(
            TestUnitOfWork::new()
                .with_employees(listed(staff()))
                .with_goals(goals)
                .with_tasks(tasks)
                .with_feedback(feedback),
        );
        let view = pages.reporting(&staff()[0], None).await.unwrap();

        assert_eq!(view.target.as_ref().map(|p| p.id), Some(2));
        let report = &view.goals[0];
        assert_eq!(report.tasks[0].label, "Pending");
        assert_eq!(
            report.feedback,
            vec!["[2030-01-02] from Alice Manager: Great job on completing this goal!"]
        );
    }

    #[tokio::test]
    async fn test_reporting_without_team() {
        let pages = builder(
            TestUnitOfWork::new().with_employees(listed(vec![employee(1, "Alice Manager")])),
        );
        let view = pages
            .reporting(&employee(1, "Alice Manager"), None)
            .await
            .unwrap();

        assert!(view.target.is_none());
        assert_eq!(view.notice.as_deref(), Some(NO_EMPLOYEES_FOR_REPORTING));
    }

    #[tokio::test]
    async fn test_insights_page() {
        let mut insights = MockInsightsRepository::new();
        insights.expect_figures().returning(|| {
            Ok(InsightFigures {
                total_goals: 3,
                average_goals: Some(1.5),
                ..Default::default()
            })
        });

        let pages = builder(TestUnitOfWork::new().with_insights(insights));

        let view = pages.insights(&staff()[0]).await.unwrap();
        assert_eq!(view.metrics[0].value, "3");
        assert_eq!(view.metrics[1].value, "1.50");

        let denied = pages.insights(&staff()[1]).await;
        assert!(matches!(denied, Err(AppError::Forbidden)));
    }
}
