//! Diesel schema for issue tracking persistence.

diesel::table! {
    /// User accounts.
    users (id) {
        /// User identifier.
        id -> Uuid,
        /// Login name.
        #[max_length = 255]
        username -> Varchar,
        /// Role tag.
        #[max_length = 50]
        role -> Varchar,
    }
}

diesel::table! {
    /// Projects.
    projects (id) {
        /// Project identifier.
        id -> Uuid,
        /// Project title.
        #[max_length = 255]
        title -> Varchar,
        /// Administering user.
        admin_id -> Uuid,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Contributor membership links.
    project_contributors (project_id, contributor_id) {
        /// Linked project.
        project_id -> Uuid,
        /// Contributing user.
        contributor_id -> Uuid,
    }
}

diesel::table! {
    /// Issues with their embedded comment list.
    issues (id) {
        /// Issue identifier.
        id -> Uuid,
        /// Owning project.
        project_id -> Uuid,
        /// Issue title.
        title -> Text,
        /// Issue description.
        description -> Text,
        /// Optional priority tag.
        #[max_length = 50]
        priority -> Nullable<Varchar>,
        /// Lifecycle status tag.
        #[max_length = 50]
        status -> Varchar,
        /// Reporting user.
        reporter_id -> Uuid,
        /// Assigned user.
        assignee_id -> Nullable<Uuid>,
        /// User who fixed the issue.
        fixer_id -> Nullable<Uuid>,
        /// Comments as a JSON array.
        comments -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Nullable<Timestamptz>,
    }
}
