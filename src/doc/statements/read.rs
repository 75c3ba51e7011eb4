/*!
# `READ <variable>[,<variable>...]`

## Purpose
Reads the information defined in `DATA` statements.

## Remarks
Each variable takes the next item from the pool.
Empty entries between commas are skipped.
A `READ PAST END OF DATA` error will occur when reading past the end.
`RUN` starts reading from the first item again.

## Example
```text
10 READ A$,A
20 PRINT A$;A
30 DATA "NUGGET",3
RUN
NUGGET 3
```

*/
