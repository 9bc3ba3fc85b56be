//! Read-only reference data: the projects and the members staffed on them.

use std::collections::HashSet;
use std::sync::LazyLock;

/// A project that members can be reviewed within.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A teammate who can be reviewed. Belongs to exactly one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub role: String,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl Member {
    pub fn new(
        id: impl Into<String>,
        project_id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            name: name.into(),
            role: role.into(),
        }
    }

    /// `"Name (Role)"`, the form used in the member picker.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

/// Reasons a directory cannot be assembled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("member {member} references unknown project {project}")]
    UnknownProject { member: String, project: String },
    #[error("duplicate project id {0}")]
    DuplicateProject(String),
    #[error("duplicate member id {0}")]
    DuplicateMember(String),
}

/// Immutable set of projects and members, in insertion order.
///
/// Every member's `project_id` is guaranteed to name a project in the same
/// directory.
#[derive(Debug, Clone)]
pub struct Directory {
    projects: Vec<Project>,
    members: Vec<Member>,
}

static BUILTIN: LazyLock<Directory> = LazyLock::new(|| Directory {
    projects: vec![
        Project::new("p1", "Mobile App Redesign (Q3)"),
        Project::new("p2", "Backend Migration API"),
        Project::new("p3", "Design System Implementation"),
    ],
    members: vec![
        Member::new("m1", "p1", "Alex Johnson", "Senior Frontend Dev"),
        Member::new("m2", "p1", "Sarah Chen", "Product Manager"),
        Member::new("m3", "p1", "Mike Ross", "QA Engineer"),
        Member::new("m4", "p2", "David Kim", "Backend Lead"),
        Member::new("m5", "p2", "Elena Rodriguez", "DevOps Engineer"),
        Member::new("m6", "p3", "Emily White", "UI/UX Designer"),
        Member::new("m7", "p3", "Chris Green", "Frontend Developer"),
    ],
});

impl Directory {
    /// Build a directory, checking ids are unique and every member points
    /// at a known project.
    pub fn new(projects: Vec<Project>, members: Vec<Member>) -> Result<Self, DirectoryError> {
        let mut project_ids = HashSet::new();
        for project in &projects {
            if !project_ids.insert(project.id.as_str()) {
                return Err(DirectoryError::DuplicateProject(project.id.clone()));
            }
        }

        let mut member_ids = HashSet::new();
        for member in &members {
            if !member_ids.insert(member.id.as_str()) {
                return Err(DirectoryError::DuplicateMember(member.id.clone()));
            }
            if !project_ids.contains(member.project_id.as_str()) {
                return Err(DirectoryError::UnknownProject {
                    member: member.id.clone(),
                    project: member.project_id.clone(),
                });
            }
        }

        Ok(Self { projects, members })
    }

    /// The process-wide directory shipped with the app.
    pub fn builtin() -> &'static Directory {
        &BUILTIN
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Members of `project_id` in insertion order. Empty for `None` or an
    /// unknown project.
    pub fn members(&self, project_id: Option<&str>) -> Vec<&Member> {
        let Some(project_id) = project_id else {
            return Vec::new();
        };
        self.members
            .iter()
            .filter(|m| m.project_id == project_id)
            .collect()
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Whether `member_id` is staffed on `project_id`.
    pub fn member_in_project(&self, project_id: &str, member_id: &str) -> bool {
        self.member(member_id)
            .is_some_and(|m| m.project_id == project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(members: Vec<&Member>) -> Vec<&str> {
        members.into_iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn builtin_lists_projects_in_order() {
        let names: Vec<_> = Directory::builtin()
            .projects()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Mobile App Redesign (Q3)",
                "Backend Migration API",
                "Design System Implementation"
            ]
        );
    }

    #[test]
    fn members_filtered_by_project_in_insertion_order() {
        let dir = Directory::builtin();
        assert_eq!(ids(dir.members(Some("p1"))), ["m1", "m2", "m3"]);
        assert_eq!(ids(dir.members(Some("p2"))), ["m4", "m5"]);
        assert_eq!(ids(dir.members(Some("p3"))), ["m6", "m7"]);
    }

    #[test]
    fn members_only_belong_to_requested_project() {
        let dir = Directory::builtin();
        for project in dir.projects() {
            assert!(dir
                .members(Some(&project.id))
                .iter()
                .all(|m| m.project_id == project.id));
        }
    }

    #[test]
    fn unknown_or_absent_project_has_no_members() {
        let dir = Directory::builtin();
        assert!(dir.members(None).is_empty());
        assert!(dir.members(Some("p9")).is_empty());
        assert!(dir.members(Some("")).is_empty());
    }

    #[test]
    fn interleaved_members_keep_order() {
        let dir = Directory::new(
            vec![Project::new("a", "A"), Project::new("b", "B")],
            vec![
                Member::new("x", "a", "X", "Dev"),
                Member::new("y", "b", "Y", "Dev"),
                Member::new("z", "a", "Z", "Dev"),
            ],
        )
        .unwrap();
        assert_eq!(ids(dir.members(Some("a"))), ["x", "z"]);
    }

    #[test]
    fn builtin_passes_validation() {
        let dir = Directory::builtin();
        assert!(Directory::new(dir.projects.clone(), dir.members.clone()).is_ok());
    }

    #[test]
    fn rejects_member_with_unknown_project() {
        let err = Directory::new(
            vec![Project::new("p1", "One")],
            vec![Member::new("m1", "p2", "Ghost", "Dev")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::UnknownProject {
                member: "m1".into(),
                project: "p2".into()
            }
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Directory::new(
            vec![Project::new("p1", "One"), Project::new("p1", "Again")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateProject("p1".into()));

        let err = Directory::new(
            vec![Project::new("p1", "One")],
            vec![
                Member::new("m1", "p1", "A", "Dev"),
                Member::new("m1", "p1", "B", "Dev"),
            ],
        )
        .unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateMember("m1".into()));
    }

    #[test]
    fn lookups_and_membership() {
        let dir = Directory::builtin();
        assert_eq!(dir.project("p2").map(|p| p.name.as_str()), Some("Backend Migration API"));
        assert_eq!(
            dir.member("m2").map(Member::display_name).as_deref(),
            Some("Sarah Chen (Product Manager)")
        );
        assert!(dir.member_in_project("p1", "m1"));
        assert!(!dir.member_in_project("p2", "m1"));
        assert!(!dir.member_in_project("p1", "m99"));
    }
}
