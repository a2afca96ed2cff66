use taskdb_core::{ColumnDef, FieldType, ModelSchema, Record};

pub static USER_SCHEMA: ModelSchema = ModelSchema {
    model: "UserModel",
    table: "UserProfile",
    primary_key: "UserID",
    columns: &[
        ColumnDef::required("LastName", FieldType::ShortText),
        ColumnDef::required("FirstName", FieldType::ShortText),
        ColumnDef::new("MiddleInitial", FieldType::ShortText),
        ColumnDef::required("LoginName", FieldType::ShortText),
        ColumnDef::required("HashedPassWord", FieldType::TinyText),
        ColumnDef::required("EmailAddress", FieldType::MediumText),
        ColumnDef::required("ScheduleDayStart", FieldType::ShortText),
        ColumnDef::required("ScheduleDayEnd", FieldType::ShortText),
        ColumnDef::new("IncludePriorityInSchedule", FieldType::Boolean),
        ColumnDef::new("IncludeMinorPriorityInSchedule", FieldType::Boolean),
        ColumnDef::new("UseLettersForMajorPriority", FieldType::Boolean),
        ColumnDef::new("SeparatePriorityWithDot", FieldType::Boolean),
    ],
};

/// A user profile record.
///
/// Schedule and priority-display preferences carry defaults that are set
/// quietly; a freshly built user has no dirty fields until a caller changes
/// something.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    record: Record,
}

impl User {
    pub fn new() -> Self {
        let mut record = USER_SCHEMA.new_record();

        record.set_value_quietly("ScheduleDayStart", "8:30 AM");
        record.set_value_quietly("ScheduleDayEnd", "5:00 PM");
        record.set_value_quietly("IncludePriorityInSchedule", true);
        record.set_value_quietly("IncludeMinorPriorityInSchedule", true);
        record.set_value_quietly("UseLettersForMajorPriority", true);
        record.set_value_quietly("SeparatePriorityWithDot", false);

        Self { record }
    }

    pub fn with_name(
        last: impl Into<String>,
        first: impl Into<String>,
        middle_initial: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let mut user = Self::new();

        user.set_last_name(last);
        user.set_first_name(first);
        user.set_middle_initial(middle_initial);
        user.set_email(email);
        user.create_login_from_name();

        user
    }

    /// Derives the login and password from the name when neither has been
    /// set yet.
    pub fn auto_generate_login_and_password(&mut self) {
        let login_unset = !self
            .record
            .field_has_value("LoginName")
            .unwrap_or_default();
        let password_unset = !self
            .record
            .field_has_value("HashedPassWord")
            .unwrap_or_default();

        if login_unset && password_unset {
            self.create_login_from_name();
        }
    }

    fn create_login_from_name(&mut self) {
        let mut login = self.last_name();
        login.push_str(&self.first_name());
        if let Some(initial) = self.middle_initial().chars().next() {
            login.push(initial);
        }

        self.set_login_name(login.clone());
        self.set_password(login);
    }

    pub fn user_id(&self) -> u64 {
        self.record.primary_key()
    }

    pub fn last_name(&self) -> String {
        self.record.get_string("LastName").unwrap_or_default()
    }

    pub fn first_name(&self) -> String {
        self.record.get_string("FirstName").unwrap_or_default()
    }

    pub fn middle_initial(&self) -> String {
        self.record.get_string("MiddleInitial").unwrap_or_default()
    }

    pub fn email(&self) -> String {
        self.record.get_string("EmailAddress").unwrap_or_default()
    }

    pub fn login_name(&self) -> String {
        self.record.get_string("LoginName").unwrap_or_default()
    }

    pub fn password(&self) -> String {
        self.record.get_string("HashedPassWord").unwrap_or_default()
    }

    pub fn day_start(&self) -> String {
        self.record
            .get_string("ScheduleDayStart")
            .unwrap_or_default()
    }

    pub fn day_end(&self) -> String {
        self.record.get_string("ScheduleDayEnd").unwrap_or_default()
    }

    pub fn priority_in_schedule(&self) -> bool {
        self.record
            .get_bool("IncludePriorityInSchedule")
            .unwrap_or_default()
    }

    pub fn minor_priority_in_schedule(&self) -> bool {
        self.record
            .get_bool("IncludeMinorPriorityInSchedule")
            .unwrap_or_default()
    }

    pub fn letters_for_major_priority(&self) -> bool {
        self.record
            .get_bool("UseLettersForMajorPriority")
            .unwrap_or_default()
    }

    pub fn separate_priority_with_dot(&self) -> bool {
        self.record
            .get_bool("SeparatePriorityWithDot")
            .unwrap_or_default()
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.record.set_value("LastName", value.into());
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.record.set_value("FirstName", value.into());
    }

    pub fn set_middle_initial(&mut self, value: impl Into<String>) {
        self.record.set_value("MiddleInitial", value.into());
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.record.set_value("EmailAddress", value.into());
    }

    pub fn set_login_name(&mut self, value: impl Into<String>) {
        self.record.set_value("LoginName", value.into());
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.record.set_value("HashedPassWord", value.into());
    }

    pub fn set_day_start(&mut self, value: impl Into<String>) {
        self.record.set_value("ScheduleDayStart", value.into());
    }

    pub fn set_day_end(&mut self, value: impl Into<String>) {
        self.record.set_value("ScheduleDayEnd", value.into());
    }

    pub fn set_priority_in_schedule(&mut self, value: bool) {
        self.record.set_value("IncludePriorityInSchedule", value);
    }

    pub fn set_minor_priority_in_schedule(&mut self, value: bool) {
        self.record
            .set_value("IncludeMinorPriorityInSchedule", value);
    }

    pub fn set_letters_for_major_priority(&mut self, value: bool) {
        self.record.set_value("UseLettersForMajorPriority", value);
    }

    pub fn set_separate_priority_with_dot(&mut self, value: bool) {
        self.record.set_value("SeparatePriorityWithDot", value);
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

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}
