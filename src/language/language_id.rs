crate::define_id_enum! {
    /// Identifier of a language bucket produced by the scanner
    LanguageId {
        Java => "java" : "Java",
        Kotlin => "kotlin" : "Kotlin",
        Scala => "scala" : "Scala",
        Groovy => "groovy" : "Groovy",
        JavaScript => "javascript" : "JavaScript" | "js" | "node" | "nodejs",
        TypeScript => "typescript" : "TypeScript" | "ts",
        Python => "python" : "Python" | "python3",
        Go => "go" : "Go" | "golang",
        Rust => "rust" : "Rust" | "rs",
        C => "c" : "C",
        Cpp => "c++" : "C++" | "cpp",
        CSharp => "csharp" : "C#" | "csharp" | "cs",
        FSharp => "fsharp" : "F#" | "fsharp",
        Ruby => "ruby" : "Ruby" | "rb",
        PHP => "php" : "PHP",
        Elixir => "elixir" : "Elixir",
        Swift => "swift" : "Swift",
        Dart => "dart" : "Dart",
        Shell => "shell" : "Shell" | "sh" | "bash" | "zsh",
        PowerShell => "powershell" : "PowerShell" | "posh" | "pwsh",
        Html => "html" : "HTML" | "xhtml",
        Css => "css" : "CSS",
        Scss => "scss" : "SCSS",
        Dockerfile => "dockerfile" : "Dockerfile" | "containerfile",
        Makefile => "makefile" : "Makefile" | "make",
    }
}
