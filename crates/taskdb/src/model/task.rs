use taskdb_core::{
    ColumnDef, Dictionary, DictionaryCode, FieldType, ModelSchema, Record, Result,
};

use chrono::NaiveDate;

pub static TASK_SCHEMA: ModelSchema = ModelSchema {
    model: "TaskModel",
    table: "Tasks",
    primary_key: "TaskID",
    columns: &[
        ColumnDef::required("CreatedBy", FieldType::Key),
        ColumnDef::required("AsignedTo", FieldType::Key),
        ColumnDef::required("Description", FieldType::MediumText),
        ColumnDef::new("ParentTask", FieldType::Key),
        ColumnDef::new("Status", FieldType::UnsignedInt),
        ColumnDef::required("PercentageComplete", FieldType::Double),
        ColumnDef::required("CreatedOn", FieldType::Date),
        ColumnDef::required("RequiredDelivery", FieldType::Date),
        ColumnDef::required("ScheduledStart", FieldType::Date),
        ColumnDef::new("ActualStart", FieldType::Date),
        ColumnDef::new("EstimatedCompletion", FieldType::Date),
        ColumnDef::new("Completed", FieldType::Date),
        ColumnDef::required("EstimatedEffortHours", FieldType::UnsignedInt),
        ColumnDef::required("ActualEffortHours", FieldType::Double),
        ColumnDef::required("SchedulePriorityGroup", FieldType::UnsignedInt),
        ColumnDef::required("PriorityInGroup", FieldType::UnsignedInt),
    ],
};

/// Workflow state of a task, stored as its code in the `Status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    NotStarted = 0,
    OnHold = 1,
    WaitingForDependency = 2,
    WorkInProgress = 3,
    Complete = 4,
}

impl TaskStatus {
    pub const ALL: [Self; 5] = [
        Self::NotStarted,
        Self::OnHold,
        Self::WaitingForDependency,
        Self::WorkInProgress,
        Self::Complete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::OnHold => "On Hold",
            Self::WaitingForDependency => "Waiting for Dependency",
            Self::WorkInProgress => "Work in Progress",
            Self::Complete => "Completed",
        }
    }

    /// Builds the validated status-code to display-name translation table.
    pub fn dictionary() -> Result<Dictionary<Self>> {
        Dictionary::new(Self::ALL.into_iter().map(|status| (status, status.name())))
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code as usize)
    }
}

impl DictionaryCode for TaskStatus {
    fn code(self) -> usize {
        self as usize
    }
}

/// A task record.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    record: Record,
}

impl Task {
    pub fn new() -> Self {
        let mut task = Self {
            record: TASK_SCHEMA.new_record(),
        };
        task.set_creation_date(chrono::Local::now().date_naive());
        task
    }

    /// A task created by a user starts out assigned to that user.
    pub fn for_creator(creator_id: u64) -> Self {
        let mut task = Self::new();
        task.set_creator_id(creator_id);
        task.set_assigned_to_id(creator_id);
        task
    }

    pub fn with_description(creator_id: u64, description: impl Into<String>) -> Self {
        let mut task = Self::for_creator(creator_id);
        task.set_description(description);
        task
    }

    pub fn task_id(&self) -> u64 {
        self.record.primary_key()
    }

    pub fn creator_id(&self) -> u64 {
        self.record.get_key("CreatedBy").unwrap_or_default()
    }

    pub fn assigned_to_id(&self) -> u64 {
        self.record.get_key("AsignedTo").unwrap_or_default()
    }

    pub fn description(&self) -> String {
        self.record.get_string("Description").unwrap_or_default()
    }

    pub fn status(&self) -> Option<TaskStatus> {
        TaskStatus::from_code(self.record.get_u32("Status").unwrap_or_default())
    }

    pub fn status_code(&self) -> u32 {
        self.record.get_u32("Status").unwrap_or_default()
    }

    pub fn has_status(&self) -> bool {
        self.record.field_has_value("Status").unwrap_or_default()
    }

    pub fn parent_task_id(&self) -> u64 {
        self.record.get_key("ParentTask").unwrap_or_default()
    }

    pub fn percent_complete(&self) -> f64 {
        self.record
            .get_f64("PercentageComplete")
            .unwrap_or_default()
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.record.get_date("CreatedOn").unwrap_or_default()
    }

    pub fn due_date(&self) -> NaiveDate {
        self.record.get_date("RequiredDelivery").unwrap_or_default()
    }

    pub fn scheduled_start(&self) -> NaiveDate {
        self.record.get_date("ScheduledStart").unwrap_or_default()
    }

    pub fn actual_start(&self) -> NaiveDate {
        self.record.get_date("ActualStart").unwrap_or_default()
    }

    pub fn estimated_completion(&self) -> NaiveDate {
        self.record
            .get_date("EstimatedCompletion")
            .unwrap_or_default()
    }

    pub fn completion_date(&self) -> NaiveDate {
        self.record.get_date("Completed").unwrap_or_default()
    }

    pub fn estimated_effort_hours(&self) -> u32 {
        self.record
            .get_u32("EstimatedEffortHours")
            .unwrap_or_default()
    }

    pub fn actual_effort_hours(&self) -> f64 {
        self.record.get_f64("ActualEffortHours").unwrap_or_default()
    }

    pub fn priority_group(&self) -> u32 {
        self.record
            .get_u32("SchedulePriorityGroup")
            .unwrap_or_default()
    }

    pub fn priority(&self) -> u32 {
        self.record.get_u32("PriorityInGroup").unwrap_or_default()
    }

    pub fn set_creator_id(&mut self, id: u64) {
        self.record.set_value("CreatedBy", id);
    }

    pub fn set_assigned_to_id(&mut self, id: u64) {
        self.record.set_value("AsignedTo", id);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.record.set_value("Description", description.into());
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.record.set_value("Status", status.code() as u32);
    }

    pub fn set_parent_task_id(&mut self, id: u64) {
        self.record.set_value("ParentTask", id);
    }

    pub fn set_percent_complete(&mut self, percent: f64) {
        self.record.set_value("PercentageComplete", percent);
    }

    pub fn set_creation_date(&mut self, date: NaiveDate) {
        self.record.set_value("CreatedOn", date);
    }

    pub fn set_due_date(&mut self, date: NaiveDate) {
        self.record.set_value("RequiredDelivery", date);
    }

    pub fn set_scheduled_start(&mut self, date: NaiveDate) {
        self.record.set_value("ScheduledStart", date);
    }

    pub fn set_actual_start(&mut self, date: NaiveDate) {
        self.record.set_value("ActualStart", date);
    }

    pub fn set_estimated_completion(&mut self, date: NaiveDate) {
        self.record.set_value("EstimatedCompletion", date);
    }

    pub fn set_completion_date(&mut self, date: NaiveDate) {
        self.record.set_value("Completed", date);
    }

    pub fn set_estimated_effort_hours(&mut self, hours: u32) {
        self.record.set_value("EstimatedEffortHours", hours);
    }

    pub fn set_actual_effort_hours(&mut self, hours: f64) {
        self.record.set_value("ActualEffortHours", hours);
    }

    pub fn add_effort_hours(&mut self, hours: f64) {
        let total = self.actual_effort_hours() + hours;
        self.set_actual_effort_hours(total);
    }

    pub fn set_priority_group(&mut self, group: u32) {
        self.record.set_value("SchedulePriorityGroup", group);
    }

    /// Letter groups count from 'A' = 1.
    pub fn set_priority_group_letter(&mut self, group: char) {
        let group = (group as u32).saturating_sub('A' as u32) + 1;
        self.set_priority_group(group);
    }

    pub fn set_priority(&mut self, priority: u32) {
        self.record.set_value("PriorityInGroup", priority);
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut Record {
        &mut self.record
    }

    pub fn into_record(self) -> Record {
        self.record
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}
