//! User-facing error types
//!
//! Every failure a command can report to the user is a variant of [`TwigError`].
//! The `Display` text of each variant is the exact single-line diagnostic printed
//! by the command-line front end. Failures in the plumbing layers (object store,
//! workspace, state file) travel as `anyhow::Error` and surface as
//! [`TwigError::Internal`].

use thiserror::Error;

/// Broad classification of a [`TwigError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed invocation (unknown command, wrong operands)
    Usage,
    /// A command other than `init` ran outside a repository
    Uninitialized,
    /// Unknown commit, branch or file
    NotFound,
    /// The repository is not in a state that allows the command
    Precondition,
    /// I/O failure or corrupted repository data
    Internal,
}

#[derive(Debug, Error)]
pub enum TwigError {
    #[error("Please enter a command.")]
    NoCommand,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized twig directory.")]
    Uninitialized,

    #[error("A twig version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("Commit id {0} is ambiguous.")]
    AmbiguousCommitId(String),

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("Cannot remove the current branch.")]
    RemoveCurrentBranch,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithItself,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl TwigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TwigError::NoCommand | TwigError::UnknownCommand | TwigError::IncorrectOperands => {
                ErrorKind::Usage
            }
            TwigError::Uninitialized => ErrorKind::Uninitialized,
            TwigError::FileNotFound
            | TwigError::CommitNotFound
            | TwigError::FileNotInCommit
            | TwigError::NoSuchBranch
            | TwigError::BranchNotFound
            | TwigError::NoCommitWithMessage => ErrorKind::NotFound,
            TwigError::AlreadyInitialized
            | TwigError::NothingToRemove
            | TwigError::EmptyCommitMessage
            | TwigError::NothingToCommit
            | TwigError::AmbiguousCommitId(_)
            | TwigError::BranchAlreadyExists
            | TwigError::InvalidBranchName(_)
            | TwigError::AlreadyOnBranch
            | TwigError::RemoveCurrentBranch
            | TwigError::UntrackedFileInTheWay
            | TwigError::UncommittedChanges
            | TwigError::MergeWithItself => ErrorKind::Precondition,
            TwigError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Whether the error is a user-facing diagnostic rather than a fatal failure
    pub fn is_diagnostic(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

impl From<std::io::Error> for TwigError {
    fn from(error: std::io::Error) -> Self {
        TwigError::Internal(error.into())
    }
}

pub type TwigResult<T> = Result<T, TwigError>;
