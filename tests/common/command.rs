use crate::common::conflict;
use crate::common::file::{FileSpec, write_file, write_plan};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A workspace with three conflicted test files and a plan that resolves
/// them, one rule style per file.
#[fixture]
pub fn conflicted_workspace(workspace_dir: TempDir) -> TempDir {
    write_file(FileSpec::new(
        workspace_dir.path().join(SEARCH_INPUT),
        search_input_conflicted(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join(PRIVATE_ROUTE),
        private_route_conflicted(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join(USER_MODEL),
        user_model_conflicted(),
    ));
    write_plan(workspace_dir.path(), &conflicted_workspace_plan());

    workspace_dir
}

pub const SEARCH_INPUT: &str = "client/src/components/Form/SearchInput.test.js";
pub const PRIVATE_ROUTE: &str = "client/src/components/Routes/Private.test.js";
pub const USER_MODEL: &str = "models/userModel.test.js";

pub fn conflicted_workspace_plan() -> String {
    format!(
        r#"[[file]]
path = "{SEARCH_INPUT}"

[[file.rules]]
kind = "replace"
text = '''
// header A
import React from "react";'''

[[file.rules]]
kind = "concatenate"

[[file.rules.transforms]]
kind = "drop_leading_lines"
count = 4

[[file]]
path = "{PRIVATE_ROUTE}"

[[file.rules]]
kind = "concatenate"

[[file.rules.transforms]]
kind = "extract_container"
name = "PrivateRoute"

[[file]]
path = "{USER_MODEL}"

[[file.rules]]
kind = "concatenate"

[[file.rules.transforms]]
kind = "substitute_line"
from = 'import User from "./userModel.js";'
to = "const User = userModel;"
"#
    )
}

pub fn search_input_conflicted() -> String {
    let header = conflict(
        "// header A\nimport React from \"react\";",
        "import React from \"react\";\n// Module Mocks",
    );
    let mocks = conflict(
        "  ...jest.requireActual(\"react-router-dom\"),\n  useNavigate: () => mockNavigate,\n}));\n\ndescribe(\"SearchInput\", () => {\n  it(\"renders\", () => {});\n});",
        "  ...jest.requireActual(\"react-router-dom\"),\n  useNavigate: () => mockNavigate,\n}));\nconst mockNavigate = jest.fn();\ndescribe(\"SearchInput main\", () => {\n  it(\"submits\", () => {});\n});",
    );

    format!(
        "{header}\n\njest.mock(\"axios\");\njest.mock(\"react-router-dom\", () => ({{\n{mocks}\n"
    )
}

pub fn search_input_resolved() -> String {
    r#"// header A
import React from "react";

jest.mock("axios");
jest.mock("react-router-dom", () => ({
  ...jest.requireActual("react-router-dom"),
  useNavigate: () => mockNavigate,
}));

describe("SearchInput", () => {
  it("renders", () => {});
});

describe("SearchInput main", () => {
  it("submits", () => {});
});
"#
    .to_string()
}

pub fn private_route_conflicted() -> String {
    let region = conflict(
        "import PrivateRoute from \"./Private\";\n\ndescribe(\"PrivateRoute\", () => {\n  it(\"shows spinner\", () => {});\n});",
        "import PrivateRoute from \"./Private\";\nimport axios from \"axios\";\n\ndescribe(\"PrivateRoute\", () => {\n  it(\"redirects\", () => {});\n});",
    );

    format!("import {{ render }} from \"@testing-library/react\";\n{region}\n")
}

pub fn private_route_resolved() -> String {
    r#"import { render } from "@testing-library/react";
import PrivateRoute from "./Private";

describe("PrivateRoute", () => {
  it("shows spinner", () => {});
});

describe('PrivateRoute main', () => {
  it("redirects", () => {});
});
"#
    .to_string()
}

pub fn user_model_conflicted() -> String {
    let region = conflict(
        "import userModel from \"./userModel.js\";\n\ndescribe(\"User Model Schema\", () => {});",
        "import mongoose from \"mongoose\";\nimport User from \"./userModel.js\";\n\ndescribe(\"User Model\", () => {});",
    );

    format!("{region}\n")
}

pub fn user_model_resolved() -> String {
    r#"import userModel from "./userModel.js";

describe("User Model Schema", () => {});

import mongoose from "mongoose";
const User = userModel;

describe("User Model", () => {});
"#
    .to_string()
}

pub fn run_unconflict_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("unconflict").expect("Failed to find unconflict binary");
    cmd.env_remove("UNCONFLICT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
