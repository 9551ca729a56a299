//! Placeholder assets and the VDFS build script.

use anyhow::Result;
use std::path::Path;

use super::write_file;
use crate::context::PatchContext;
use crate::params::PatchConfig;

/// Empty output-unit archive. Either the CSL or a compiled BIN will replace
/// it; the block inside keeps parsers from choking on a zero-entry library.
const OU_CONTENT: &str = "ZenGin Archive
ver 1
zCArchiverGeneric
ASCII
saveGame 0
date 01/01/1970 00:00:00 AM
user Ninja
END
objects 4
END

[%% zCCSLib 0 0]
\tNumOfItems=int:1
\t[%% zCCSBlock 0 1]
\t\tblockName=string:NINJA_NONE_15_01
\t\tnumOfBlocks=int:1
\t\tsubBlock0=float:0
\t\t[%% zCCSAtomicBlock 0 2]
\t\t\t[%% oCMsgConversation:oCNpcMessage:zCEventMessage 0 3]
\t\t\t\tsubType=enum:0
\t\t\t\ttext=string:Dialog line shown in-game
\t\t\t\tname=string:NINJA_NONE_15_01.WAV
\t\t\t[]
\t\t[]
\t[]
[]
";

/// Human model-script placeholder to copy and rename per model.
const MDS_CONTENT: &str = r#"Model ("HuS")
{

    // REGISTER NEW ARMOR HERE

    aniEnum
    {

        // ADD NEW ANIMATIONS HERE

    }
}
"#;

/// Output-unit placeholders, one per selected game or a single suffix-free
/// file when all four are selected.
pub(crate) fn write_ou_files(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
) -> Result<()> {
    if config.ou.is_full() {
        write_file(root, &format!("Ninja/{}/OU.csl", context.name), OU_CONTENT)
    } else {
        for code in config.ou.codes() {
            write_file(
                root,
                &format!("Ninja/{}/OU_G{}.csl", context.name, code),
                OU_CONTENT,
            )?;
        }
        Ok(())
    }
}

/// Animation placeholders, same suffix scheme as the output units.
pub(crate) fn write_anim_files(
    root: &Path,
    config: &PatchConfig,
    context: &PatchContext,
) -> Result<()> {
    if config.anim.is_full() {
        write_file(
            root,
            &format!("Ninja/{}/Anims_Humans.mds", context.name),
            MDS_CONTENT,
        )
    } else {
        for code in config.anim.codes() {
            write_file(
                root,
                &format!("Ninja/{}/Anims_Humans_G{}.mds", context.name, code),
                MDS_CONTENT,
            )?;
        }
        Ok(())
    }
}

/// GothicVDFS build script listing everything that goes into the VDF.
pub(crate) fn write_vm_script(root: &Path, context: &PatchContext) -> Result<()> {
    let content = format!(
        r"[BEGINVDF]
Comment={}
BaseDir=.\
VDFName=.\{}.vdf

[FILES]
; Modular resources
_work\Data\Anims\*.MDS
_work\Data\Anims\MDS_Mobsi\*.MDS
_work\Data\Anims\MDS_Overlay\*.MDS
_work\Data\Anims\_compiled\*.MAN
_work\Data\Anims\_compiled\*.MDH
_work\Data\Anims\_compiled\*.MDL
_work\Data\Anims\_compiled\*.MDM
_work\Data\Anims\_compiled\*.MMB
_work\Data\Anims\_compiled\*.MSB
_work\Data\Meshes\_compiled\*.MRM
_work\Data\Meshes\_compiled\*.MSH
_work\Data\Presets\*.ZEN
_work\Data\Sound\SFX\*.WAV
_work\Data\Sound\Speech\*.WAV
_work\Data\Textures\_compiled\*-C.TEX
_work\Data\Textures\_compiled\*.FNT
_work\Data\Worlds\*.ZEN

; Ninja resources
Ninja\{}\* -r

; License and README
LICENSE
README.md

[EXCLUDE]
; Exclude sub-directories
*\Ninja\* -r
*\_work\* -r

; Exclude source scripts
_work\Data\Scripts\* -r

; Exclude metadata
.empty -r
*.vm
*.vdf
*.bat
*.cfg
.*

[INCLUDE]
; License and README
LICENSE
README.md

[ENDVDF]
",
        context.description, context.name, context.name
    );

    write_file(root, &format!("{}.vm", context.name), &content)
}
