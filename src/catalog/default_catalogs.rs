//! Compiled-in command catalogs for the two collector variants.
//!
//! Pure data: sections of forensic and diagnostic commands, in the order
//! they should be executed. Commands that rely on glob expansion,
//! environment variables, or `;`-chaining are marked `needs_shell`.

use crate::catalog::{argv, shell, Catalog, CatalogCommand, CatalogSection};

/// `find` invocation that dumps the contents of every file under a path.
fn cat_files(path: &str) -> String {
    format!("find {} -type f -exec cat {{}} +", path)
}

/// `find` invocation that lists every file under a path.
fn list_files(path: &str) -> String {
    format!("find {} -type f -exec ls {{}} +", path)
}

/// `find` invocation that prints each file name followed by its tail.
fn tail_files(path: &str) -> String {
    format!("find {} -type f -print -exec tail {{}} ;", path)
}

/// Variant of [`tail_files`] with the `-exec … ;` terminator
/// backslash-escaped so it survives shell evaluation.
fn tail_files_shell(path: &str) -> String {
    format!("find {} -type f -print -exec tail {{}} \\;", path)
}

fn section(name: &str, commands: Vec<CatalogCommand>) -> CatalogSection {
    CatalogSection {
        name: name.to_string(),
        commands,
    }
}

/// Catalog for the file-tree collector variant.
pub fn default_collector_catalog() -> Catalog {
    Catalog {
        sections: vec![
            section("kernel_name_version", vec![argv("uname -rs")]),
            section("kernel modules", vec![argv("lsmod")]),
            section("network interfaces", vec![argv("ifconfig -a")]),
            section(
                "networking information",
                vec![
                    argv(cat_files("/etc/hosts")),
                    argv(cat_files("/etc/networks")),
                    argv(cat_files("/etc/protocols")),
                    argv(cat_files("/etc/ethers")),
                    argv(cat_files("/etc/netgroup")),
                    argv(cat_files("/etc/dhclients")),
                ],
            ),
            section(
                "hostname",
                vec![argv("hostname"), argv(cat_files("/etc/hostname"))],
            ),
            section(
                "login history",
                vec![
                    argv("last -Faixw"),
                    argv(cat_files("/var/log/auth.log")),
                    argv(cat_files("/var/log/secure")),
                    argv(cat_files("/var/log/audit.log")),
                ],
            ),
            section("unix distribution", vec![shell(cat_files("/etc/*release"))]),
            section("socket connections", vec![argv("ss -p"), argv("ss -naop")]),
            section("processes", vec![argv("ps -eww")]),
            section(
                "password files",
                vec![argv(cat_files("/etc/shadow")), argv(cat_files("/etc/passwd"))],
            ),
            section(
                "scheduled jobs",
                vec![
                    shell(cat_files("/etc/cron*")),
                    shell(cat_files("/var/spool/cron/*")),
                ],
            ),
            section("x window config files", vec![shell(cat_files("/etc/X11/*"))]),
            section(
                "yum repositories",
                vec![shell(cat_files("/etc/yum.repos.d/*"))],
            ),
            section(
                "cached yum data files",
                vec![argv(list_files("/var/cache/yum"))],
            ),
            section("installed yum packages", vec![argv("yum list installed")]),
            section(
                "startup scripts",
                vec![shell(cat_files("/etc/rc.d/*")), shell(cat_files("/etc/init*"))],
            ),
            section("open files", vec![argv("lsof -R")]),
            section("ssh configuration", vec![shell(cat_files("$HOME/.ssh"))]),
            section(
                "user commands",
                vec![
                    argv(list_files("/usr/bin")),
                    argv(list_files("/usr/local/bin")),
                ],
            ),
            section("process tree", vec![argv("pstree -alp")]),
        ],
    }
}

/// Catalog for the structured-log collector variant.
pub fn default_weasel_catalog() -> Catalog {
    Catalog {
        sections: vec![
            section("kernel_name_version", vec![argv("uname -rs")]),
            section("kernel modules", vec![argv("lsmod")]),
            section("network interfaces", vec![argv("ifconfig -a")]),
            section(
                "networking information",
                vec![
                    argv(tail_files("/etc/hosts")),
                    argv(tail_files("/etc/networks")),
                    argv(tail_files("/etc/protocols")),
                    argv(tail_files("/etc/nsswitch.conf")),
                ],
            ),
            section(
                "hostname",
                vec![argv("hostname"), argv(tail_files("/etc/hostname"))],
            ),
            section(
                "login history",
                vec![
                    argv("last -Faixw"),
                    shell(tail_files_shell("/var/log/secure*")),
                    shell(tail_files_shell("/var/log/audit*")),
                ],
            ),
            section(
                "unix distribution",
                vec![
                    argv(tail_files("/etc/os-release")),
                    argv(tail_files("/etc/redhat-release")),
                ],
            ),
            section("socket connections", vec![argv("ss -p"), argv("ss -naop")]),
            section(
                "processes/services",
                vec![
                    argv("ps aux"),
                    argv("pstree -alp"),
                    argv("systemctl -t service --state=active"),
                ],
            ),
            section(
                "password files",
                vec![
                    argv(tail_files("/etc/shadow")),
                    argv(tail_files("/etc/passwd")),
                ],
            ),
            section(
                "scheduled jobs",
                vec![
                    shell(tail_files_shell("/etc/cron*")),
                    argv(tail_files("/var/spool/cron")),
                ],
            ),
            section(
                "administrative db info",
                vec![
                    argv("getent passwd"),
                    argv("getent group"),
                    argv("getent protocols"),
                    argv("getent networks"),
                    argv("getent services"),
                    argv("getent rpc"),
                ],
            ),
            section(
                "yum repositories",
                vec![
                    argv(tail_files("/etc/yum.repos.d")),
                    argv(tail_files("/etc/yum.conf")),
                ],
            ),
            section(
                "cached yum data files",
                vec![argv(list_files("/var/cache/yum"))],
            ),
            section("installed yum packages", vec![argv("yum list installed")]),
            section(
                "startup scripts",
                vec![
                    shell(tail_files_shell("/etc/rc.d/*")),
                    shell(tail_files_shell("/etc/init*")),
                ],
            ),
            section("open files", vec![argv("lsof -R")]),
            section(
                "ssh configuration",
                vec![shell(format!("cd /home ; {}", tail_files_shell("*/.ssh")))],
            ),
            section(
                "user commands",
                vec![
                    argv(list_files("/usr/bin")),
                    argv(list_files("/usr/local/bin")),
                ],
            ),
            section(
                "custom log sources",
                vec![argv(tail_files("/var/log/sudo"))],
            ),
            // hostname, login history and running services on pre-systemd hosts
            section(
                "rhel 5-6",
                vec![
                    argv(tail_files("/etc/sysconfig/network")),
                    argv("lastlog"),
                    argv("chkconfig --list"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_catalog_has_unique_section_names() {
        let catalog = default_collector_catalog();
        let mut names: Vec<&str> = catalog.sections.iter().map(|s| s.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn glob_commands_are_marked_for_shell_evaluation() {
        for catalog in [default_collector_catalog(), default_weasel_catalog()] {
            for section in &catalog.sections {
                for command in &section.commands {
                    if command.line.contains('*') || command.line.contains("$HOME") {
                        assert!(
                            command.needs_shell,
                            "command should be shell-evaluated: {}",
                            command.line
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn weasel_catalog_covers_administrative_databases() {
        let catalog = default_weasel_catalog();
        let admin = catalog
            .sections
            .iter()
            .find(|s| s.name == "administrative db info")
            .expect("administrative db section");
        assert_eq!(admin.commands.len(), 6);
        assert!(admin.commands.iter().all(|c| c.line.starts_with("getent ")));
    }
}
