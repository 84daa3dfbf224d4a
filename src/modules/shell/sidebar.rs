use edudash_models::{Role, ViewId};

/// The sidebar flavour for a role. Each offers only its role's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarVariant {
    Student,
    Teacher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub view: ViewId,
    pub label: &'static str,
    pub active: bool,
}

impl SidebarVariant {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Student => Self::Student,
            Role::Teacher => Self::Teacher,
        }
    }

    pub fn role(self) -> Role {
        match self {
            Self::Student => Role::Student,
            Self::Teacher => Role::Teacher,
        }
    }

    pub fn views(self) -> &'static [ViewId] {
        ViewId::views_for(self.role())
    }

    /// Menu entries in display order, with `current` marked active.
    pub fn menu(self, current: ViewId) -> Vec<SidebarItem> {
        self.views()
            .iter()
            .map(|&view| SidebarItem {
                view,
                label: view.label(),
                active: view == current,
            })
            .collect()
    }
}
