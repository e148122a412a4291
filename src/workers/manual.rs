use crate::common::style::{Fragment, Styled, Tag};
use std::io::{self, Write};

/// The manual, as printed by `--manual`.
pub fn manual() -> Styled {
    let mut out = Styled::default();
    let mut line = |fragments: &[(&str, Option<Tag>)]| {
        for &(text, tag) in fragments {
            out.push(Fragment { text: text.to_string(), tag });
        }
        out.push(Fragment::plain("\n"));
    };
    let heading = Some(Tag::Heading);
    let label = Some(Tag::Label);
    let command = Some(Tag::Command);
    let argument = Some(Tag::Argument);
    let link = Some(Tag::Link);

    line(&[("Reveal - Manual", heading)]);
    line(&[("    Starting Point", label)]);
    line(&[("        Reveal is a program to reveal data about the file system.", None)]);
    line(&[("        It lists the entries of a directory with their owner, size, permissions and type.", None)]);
    line(&[("        It is created to work on Unix-like operating systems, such as Linux and MacOS.", None)]);
    line(&[]);
    line(&[("    Usage", label)]);
    line(&[("        Reveal expects a path for it to reveal. It defaults to the current directory.", None)]);
    line(&[("        As an example, you can make it reveal all the entries in your home directory:", None)]);
    line(&[]);
    line(&[("        ", None), ("reveal ", command), ("~", argument)]);
    line(&[]);
    line(&[("        All contents printed contains headers to help you understand the data.", None)]);
    line(&[]);
    line(&[("        If it is more comfortable, you can also pipe its output to a pager.", None)]);
    line(&[("        For this other example, let's reveal a directory with a large amount of files:", None)]);
    line(&[]);
    line(&[("        ", None), ("reveal ", command), ("/usr/bin", argument), (" | ", None), ("less", command)]);
    line(&[]);
    line(&[("        You can use ", None), ("q", command), (" to exit the ", None), ("less", command), (" command.", None)]);
    line(&[]);
    line(&[("    Single Data", label)]);
    line(&[("        Instead of a listing, one of these flags reveals a single datum of any path:", None)]);
    line(&[("        --type, --size, --human-size, --user, --user-id, --group, --group-id,", None)]);
    line(&[("        --permissions, --human-permissions, --inode, --modified-date.", None)]);
    line(&[("        Symlinks are revealed as they are unless ", None), ("--transpass", command), (" is given.", None)]);
    line(&[]);
    line(&[("    Colors", label)]);
    line(&[("        Use ", None), ("--no-color", command), (" or set NO_COLOR to print plain text.", None)]);
    line(&[("        Entry names follow the LS_COLORS environment variable.", None)]);
    line(&[]);
    line(&[("    Source Code", label)]);
    line(&[("        The source code of this program can be found at:", None)]);
    line(&[("        https://github.com/skippyr/reveal", link)]);
    line(&[]);
    line(&[("    License", label)]);
    line(&[("        Reveal is distributed under the terms of the MIT License.", None)]);
    line(&[("        Copyright (c) 2023, Sherman Rofeman. MIT License.", None)]);
    out
}

pub fn run() -> anyhow::Result<()> {
    write!(io::stdout(), "{}", manual().paint())?;
    Ok(())
}
