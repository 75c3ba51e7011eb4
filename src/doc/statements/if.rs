/*!
# `IF <expression> THEN <statement> [ELSE <statement>]`
Also `IF <expression> THEN <line number>`.

## Purpose
Do something contingent on a predicate.

## Remarks
A number is true when it isn't zero, a string when it isn't empty.
Comparisons give -1 for true and 0 for false.

Each branch is a single statement. A line number on its own
means `GOTO` that line. When `IF` is nested inside a branch, the
first `ELSE` belongs to the inner `IF`.

## Example
```text
10 A$="STEVE"
20 IF A$<>"KEMP" THEN PRINT "NOT KEMP" ELSE PRINT "KEMP"
30 IF 1 > 2 THEN 10
RUN
NOT KEMP
```

*/
