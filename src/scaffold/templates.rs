// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source templates for a new mod project.

/// Values substituted into the templates.
#[derive(Debug, Clone, Copy)]
pub struct TemplateVars<'a> {
    /// C# identifier of the project (`AirlockDoor`).
    pub ident: &'a str,
    /// Root namespace (`PeterHan.AirlockDoor`).
    pub namespace: &'a str,
    /// `staticID` from `mod.yaml`.
    pub static_id: &'a str,
    /// Mod version from `mod_info.yaml`.
    pub version: &'a str,
}

/// SDK-style project referencing the game's managed assemblies.
///
/// `ONI_MANAGED` must point at `OxygenNotIncluded_Data/Managed`.
#[must_use]
pub fn csproj(vars: &TemplateVars<'_>) -> String {
    let TemplateVars {
        ident,
        namespace,
        version,
        ..
    } = vars;
    let references = [
        "0Harmony",
        "Assembly-CSharp",
        "Assembly-CSharp-firstpass",
        "UnityEngine",
        "UnityEngine.CoreModule",
    ]
    .iter()
    .map(|name| {
        format!(
            "    <Reference Include=\"{name}\">\n\
             \x20     <HintPath>$(GameManaged)/{name}.dll</HintPath>\n\
             \x20     <Private>false</Private>\n\
             \x20   </Reference>\n"
        )
    })
    .collect::<String>();

    format!(
        "<Project Sdk=\"Microsoft.NET.Sdk\">\n\
         \x20 <PropertyGroup>\n\
         \x20   <TargetFramework>net471</TargetFramework>\n\
         \x20   <AssemblyName>{ident}</AssemblyName>\n\
         \x20   <RootNamespace>{namespace}</RootNamespace>\n\
         \x20   <Version>{version}</Version>\n\
         \x20   <LangVersion>latest</LangVersion>\n\
         \x20   <GameManaged Condition=\"'$(GameManaged)' == ''\">$(ONI_MANAGED)</GameManaged>\n\
         \x20 </PropertyGroup>\n\
         \x20 <ItemGroup>\n\
         {references}\
         \x20 </ItemGroup>\n\
         </Project>\n"
    )
}

/// `UserMod2` entry point that lets Harmony apply the patches in the assembly.
#[must_use]
pub fn patches_cs(vars: &TemplateVars<'_>) -> String {
    let TemplateVars {
        ident,
        namespace,
        static_id,
        ..
    } = vars;
    format!(
        "using HarmonyLib;\n\
         using KMod;\n\
         \n\
         namespace {namespace}\n\
         {{\n\
         \x20   public sealed class {ident}Patches : UserMod2\n\
         \x20   {{\n\
         \x20       public override void OnLoad(Harmony harmony)\n\
         \x20       {{\n\
         \x20           base.OnLoad(harmony);\n\
         \x20           Debug.Log(\"[{static_id}] loaded\");\n\
         \x20       }}\n\
         \x20   }}\n\
         }}\n"
    )
}

/// Ignore rules for .NET build output.
pub const GITIGNORE: &str = "bin/\nobj/\n*.user\n.vs/\n";
